// Portfolio content: the section table, its invariants, and the header profile.
// Everything here is 'static and read-only.

pub mod models;
pub mod table;

pub use models::{ContentSections, Education, Job, Profile, SectionKey};
pub use table::{CONTENT, PROFILE};
