//! Color triplets stored as three named child elements
//!
//! ```xml
//! <white><L>100</L><a>0</a><b>0</b></white>
//! ```
//!
//! All three children must exist and hold valid doubles; otherwise the
//! whole triplet fails and the error names the first bad field.

#![allow(non_snake_case)]

use super::scalar::parse_double;
use crate::dom::{Document, NodeId};
use crate::error::{ColorFault, DomError, Result};

/// CIE L*a*b* color
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorLab {
    pub L: f64,
    pub a: f64,
    pub b: f64,
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorRgb {
    pub R: f64,
    pub G: f64,
    pub B: f64,
}

/// CIE Yxy color
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorYxy {
    pub Y: f64,
    pub x: f64,
    pub y: f64,
}

impl Document {
    /// Read `<L>`, `<a>` and `<b>` under `id`
    pub fn node_lab(&self, id: NodeId) -> Result<ColorLab> {
        let [L, a, b] = self.triplet(id, "Lab", ["L", "a", "b"])?;
        Ok(ColorLab { L, a, b })
    }

    /// Read `<R>`, `<G>` and `<B>` under `id`
    pub fn node_rgb(&self, id: NodeId) -> Result<ColorRgb> {
        let [R, G, B] = self.triplet(id, "RGB", ["R", "G", "B"])?;
        Ok(ColorRgb { R, G, B })
    }

    /// Read `<Y>`, `<x>` and `<y>` under `id`
    pub fn node_yxy(&self, id: NodeId) -> Result<ColorYxy> {
        let [Y, x, y] = self.triplet(id, "Yxy", ["Y", "x", "y"])?;
        Ok(ColorYxy { Y, x, y })
    }

    /// Locate all three children first, then parse them in field order
    fn triplet(
        &self,
        id: NodeId,
        color: &'static str,
        fields: [&'static str; 3],
    ) -> Result<[f64; 3]> {
        self.node(id).ok_or(DomError::NodeNotFound(id))?;
        let incomplete = |field: &'static str, fault: ColorFault| DomError::IncompleteColor {
            color,
            field,
            fault,
        };

        let mut children = [0 as NodeId; 3];
        for (slot, field) in children.iter_mut().zip(fields) {
            *slot = self
                .child_by_name(id, field)
                .ok_or_else(|| incomplete(field, ColorFault::Missing))?;
        }

        let mut values = [0f64; 3];
        for ((value, child), field) in values.iter_mut().zip(children).zip(fields) {
            let text = self.node_data(child).unwrap_or_default();
            *value = parse_double(text).map_err(|_| incomplete(field, ColorFault::InvalidNumber))?;
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_node(xml: &str) -> (Document, NodeId) {
        let doc = Document::parse(xml.as_bytes()).unwrap();
        let id = doc.get_node(None, "color").unwrap();
        (doc, id)
    }

    #[test]
    fn test_lab() {
        let (doc, id) = color_node("<color><L>50</L><a>10</a><b>-5</b></color>");
        assert_eq!(
            doc.node_lab(id).unwrap(),
            ColorLab {
                L: 50.0,
                a: 10.0,
                b: -5.0
            }
        );
    }

    #[test]
    fn test_lab_missing_field() {
        let (doc, id) = color_node("<color><L>50</L><a>10</a></color>");
        match doc.node_lab(id) {
            Err(DomError::IncompleteColor { color, field, fault }) => {
                assert_eq!(color, "Lab");
                assert_eq!(field, "b");
                assert_eq!(fault, ColorFault::Missing);
            }
            other => panic!("Expected IncompleteColor, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_reported_before_invalid() {
        let (doc, id) = color_node("<color><L>bad</L><a>10</a></color>");
        match doc.node_lab(id) {
            Err(DomError::IncompleteColor { field, fault, .. }) => {
                assert_eq!(field, "b");
                assert_eq!(fault, ColorFault::Missing);
            }
            other => panic!("Expected IncompleteColor, got {:?}", other),
        }
    }

    #[test]
    fn test_rgb_invalid_value() {
        let (doc, id) = color_node("<color><R>1</R><G>0.5x</G><B>0</B></color>");
        match doc.node_rgb(id) {
            Err(DomError::IncompleteColor { color, field, fault }) => {
                assert_eq!(color, "RGB");
                assert_eq!(field, "G");
                assert_eq!(fault, ColorFault::InvalidNumber);
            }
            other => panic!("Expected IncompleteColor, got {:?}", other),
        }
    }

    #[test]
    fn test_rgb_order_independent() {
        let (doc, id) = color_node("<color><B>3</B><R>1</R><G>2</G></color>");
        assert_eq!(
            doc.node_rgb(id).unwrap(),
            ColorRgb {
                R: 1.0,
                G: 2.0,
                B: 3.0
            }
        );
    }

    #[test]
    fn test_yxy_case_sensitive_names() {
        let (doc, id) = color_node("<color><y>0.3290</y><x>0.3127</x><Y>1.0</Y></color>");
        let yxy = doc.node_yxy(id).unwrap();
        assert_eq!(yxy.Y, 1.0);
        assert_eq!(yxy.x, 0.3127);
        assert_eq!(yxy.y, 0.3290);
    }

    #[test]
    fn test_empty_child_is_invalid() {
        let (doc, id) = color_node("<color><Y/><x>0</x><y>0</y></color>");
        assert!(doc.node_yxy(id).is_err());
    }

    #[test]
    fn test_unknown_node() {
        let (doc, _) = color_node("<color/>");
        assert!(matches!(doc.node_lab(99), Err(DomError::NodeNotFound(99))));
    }
}
