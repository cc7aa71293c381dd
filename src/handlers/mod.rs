// handlers - two security tiers
//
// system:   no authentication (/, /health)
// contacts: token required (/api/contacts/*), scoped to the calling user

pub mod contacts;
pub mod system;
