pub mod layout;

pub use layout::{BoardLayout, BouncerDef, SlotDef, SlotKind};
