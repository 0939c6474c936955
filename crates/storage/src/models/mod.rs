mod registrant;

pub use registrant::{Registrant, RegistrantKind, Team};
