//! A small arena DOM for the editable surface: parsing, serialization,
//! tree editing and boundary-point ranges.

mod document;
mod node;
mod parse;
mod range;
mod serialize;

pub use document::Document;
pub use node::{
    is_block_element, is_raw_text_element, is_void_element, Attribute, ElementData, Node,
    NodeData, NodeId,
};
pub use parse::parse_fragment;
pub use range::{DomPoint, DomRange};
