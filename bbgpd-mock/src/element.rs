use bbgpd_core::{Element, Scalar};

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Scalar(Scalar),
    Complex(Vec<MockElement>),
    Array(Vec<MockElement>),
}

/// Hand-built node of a response tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MockElement {
    name: String,
    node: Node,
}

impl MockElement {
    /// Leaf holding a single value.
    pub fn scalar(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self {
            name: name.into(),
            node: Node::Scalar(value.into()),
        }
    }

    /// Complex element with named children, in order.
    pub fn complex(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            node: Node::Complex(children),
        }
    }

    /// Array element; values may be scalars or complex records.
    pub fn array(name: impl Into<String>, values: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            node: Node::Array(values),
        }
    }

    /// Append a child (complex) or a value (array). Scalars are left unchanged.
    #[must_use]
    pub fn with(mut self, el: Self) -> Self {
        match &mut self.node {
            Node::Complex(items) | Node::Array(items) => items.push(el),
            Node::Scalar(_) => {}
        }
        self
    }
}

impl Element for MockElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_array(&self) -> bool {
        matches!(self.node, Node::Array(_))
    }

    fn num_values(&self) -> usize {
        match &self.node {
            Node::Scalar(_) => 1,
            Node::Complex(_) => 0,
            Node::Array(values) => values.len(),
        }
    }

    fn num_elements(&self) -> usize {
        match &self.node {
            Node::Complex(children) => children.len(),
            _ => 0,
        }
    }

    fn get_element(&self, name: &str) -> Option<&dyn Element> {
        match &self.node {
            Node::Complex(children) => children
                .iter()
                .find(|c| c.name == name)
                .map(|c| c as &dyn Element),
            _ => None,
        }
    }

    fn element_at(&self, index: usize) -> Option<&dyn Element> {
        match &self.node {
            Node::Complex(children) => children.get(index).map(|c| c as &dyn Element),
            _ => None,
        }
    }

    fn value_as_element(&self, index: usize) -> Option<&dyn Element> {
        match &self.node {
            Node::Array(values) => values
                .get(index)
                .filter(|v| matches!(v.node, Node::Complex(_)))
                .map(|v| v as &dyn Element),
            _ => None,
        }
    }

    fn value_at(&self, index: usize) -> Option<Scalar> {
        match &self.node {
            Node::Scalar(v) if index == 0 => Some(v.clone()),
            Node::Array(values) => match values.get(index).map(|v| &v.node) {
                Some(Node::Scalar(v)) => Some(v.clone()),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_lookup_by_name_and_position() {
        let el = MockElement::complex("fieldData", vec![])
            .with(MockElement::scalar("PX_LAST", 101.5))
            .with(MockElement::scalar("NAME", "ABC Corp"));

        assert!(el.has_element("PX_LAST"));
        assert!(!el.has_element("VOLUME"));
        assert_eq!(el.num_elements(), 2);
        assert_eq!(
            el.element_at(1).and_then(Element::value),
            Some(Scalar::from("ABC Corp"))
        );
        assert_eq!(el.value(), None);
    }

    #[test]
    fn array_distinguishes_scalar_and_complex_values() {
        let el = MockElement::array(
            "mixed",
            vec![
                MockElement::scalar("v", 1_i64),
                MockElement::complex("r", vec![MockElement::scalar("a", "x")]),
            ],
        );
        assert!(el.is_array());
        assert_eq!(el.num_values(), 2);
        assert_eq!(el.value_at(0), Some(Scalar::Int(1)));
        assert!(el.value_as_element(0).is_none());
        assert!(el.value_as_element(1).is_some());
        assert_eq!(el.value_at(1), None);
    }
}
