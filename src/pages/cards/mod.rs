//! Card pages: list, creation wizard, edit session, preview and the
//! template gallery.

mod create;
mod edit;
mod list;
mod preview;
mod templates;

pub use create::CreateCard;
pub use edit::EditCard;
pub use list::MyCards;
pub use preview::{save_vcard, PreviewCard};
pub use templates::Templates;
