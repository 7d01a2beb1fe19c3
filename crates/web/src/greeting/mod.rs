//! Shareable greeting surface.
//!
//! A greeting link carries its whole payload in four query parameters; the
//! handlers here render the read-only card view (with social preview
//! metadata) and the downloadable PNG. Decoding is all-or-nothing: a link
//! missing any parameter gets the error page, never a partial card.

pub(crate) mod card;
pub(crate) mod share;
pub(crate) mod surface;
mod view;
