//! Client-side conveniences.
//!
//! The original SmartPantry page shipped a tiny script doing two things:
//! flipping the password field between masked and plain text, and fetching
//! `/alerts` once on load to pop a dialog when items are about to expire.
//! Both live here as plain library code so they can be driven (and tested)
//! without a browser: [`visibility`] models the toggle, [`notify`] performs
//! the one-shot check and builds the alert message.

pub mod notify;
pub mod visibility;
