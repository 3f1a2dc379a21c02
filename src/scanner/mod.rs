//! Markup Scanner
//!
//! Best-effort lexical scanning of serialized markup. Rules only talk to
//! the matchers re-exported here, so a structural parser can later stand
//! in behind the same functions.

pub mod matchers;

pub use matchers::{
    element_content, line_of, mentions_tag, open_tags, Attribute, Attributes, Content, Tag,
    TagSet,
};
