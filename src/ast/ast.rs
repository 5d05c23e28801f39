use std::fmt::{Display, Formatter, Result};

/// Node Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeType {
    Int,
    Bool,
    Atom,
    Let,
    Sequence,
}

/// A node of the syntax tree.
///
/// Composite nodes own their children, so dropping the root releases the
/// whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Int(i64),
    Bool(bool),
    /// Name without the leading `:`.
    Atom(String),
    /// `value` is always one of the literal variants.
    Let { name: String, value: Box<Node> },
    /// Top level statements in source order. Only ever the root.
    Sequence(Vec<Node>),
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Int(_) => NodeType::Int,
            Node::Bool(_) => NodeType::Bool,
            Node::Atom(_) => NodeType::Atom,
            Node::Let { .. } => NodeType::Let,
            Node::Sequence(_) => NodeType::Sequence,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Int(_) | Node::Bool(_) | Node::Atom(_))
    }

    /// Direct children, in order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Let { value, .. } => vec![value.as_ref()],
            Node::Sequence(body) => body.iter().collect(),
            _ => vec![],
        }
    }

    fn print(&self, f: &mut Formatter<'_>, indent: usize) -> Result {
        write!(f, "{}", "  ".repeat(indent))?;

        match self {
            Node::Int(value) => writeln!(f, "Int({})", value),
            Node::Bool(value) => writeln!(f, "Bool({})", value),
            Node::Atom(name) => writeln!(f, "Atom(:{})", name),
            Node::Let { name, value } => {
                writeln!(f, "Let({})", name)?;
                value.print(f, indent + 1)
            }
            Node::Sequence(body) => {
                writeln!(f, "Program")?;
                for stmt in body {
                    stmt.print(f, indent + 1)?;
                }
                Ok(())
            }
        }
    }
}

/// Prints the tree one node per line, indented two spaces per level:
///
/// ```text
/// Program
///   Let(x)
///     Int(42)
///   Atom(:ok)
/// ```
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.print(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeType};

    #[test]
    fn test_print_tree() {
        let tree = Node::Sequence(vec![
            Node::Let {
                name: "x".to_string(),
                value: Box::new(Node::Int(-3)),
            },
            Node::Atom("ok".to_string()),
            Node::Bool(false),
        ]);

        assert_eq!(
            tree.to_string(),
            "Program\n  Let(x)\n    Int(-3)\n  Atom(:ok)\n  Bool(false)\n"
        );
    }

    #[test]
    fn test_print_empty_program() {
        assert_eq!(Node::Sequence(vec![]).to_string(), "Program\n");
    }

    #[test]
    fn test_node_types_and_children() {
        let binding = Node::Let {
            name: "flag".to_string(),
            value: Box::new(Node::Bool(true)),
        };

        assert_eq!(binding.get_node_type(), NodeType::Let);
        assert!(!binding.is_literal());
        assert_eq!(binding.children(), vec![&Node::Bool(true)]);
        assert!(Node::Int(1).children().is_empty());
        assert!(Node::Atom("a".to_string()).is_literal());
    }
}
