mod block;
mod category_tree;
mod codepoint_info;
mod general_category;
mod plane;

pub use block::codename;
pub use block::Block;
pub use category_tree::CategoryTree;
pub use codepoint_info::CodepointInfo;
pub use codepoint_info::CodepointRecord;
pub use general_category::Category;
pub use plane::Plane;

#[derive(Debug, PartialEq)]
pub enum PropertiesError
{
    UnknownPropertyValue,
}

