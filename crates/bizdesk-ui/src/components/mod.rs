pub mod card;
pub mod form;
pub mod header;
pub mod layout;
pub mod modal;
pub mod nav;
pub mod toast;
