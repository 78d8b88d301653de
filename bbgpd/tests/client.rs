mod helpers;

#[path = "client/bdp.rs"]
mod bdp;
#[path = "client/bdh.rs"]
mod bdh;
#[path = "client/lifecycle.rs"]
mod lifecycle;
