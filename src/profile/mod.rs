//! Profile data model and resolution.
//!
//! [`schema`] mirrors the fetched JSON; [`view`] turns a document and a
//! profile id into the merged [`ProfileView`] the renderer consumes.

mod lenient;
pub mod schema;
pub mod view;

pub use schema::{Button, FooterCta, FooterSpec, Profile, ProfileDocument, SocialLink, Theme};
pub use view::{
    ButtonGroups, ButtonView, DEFAULT_AVATAR, DEFAULT_TITLE, FooterCtaView, FooterView,
    ProfileView, SocialView, merge, resolve_view,
};
