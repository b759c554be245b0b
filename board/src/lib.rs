//! Core logic for the RFP pipeline board.
//!
//! This crate owns everything about the kanban board that is not drawing: the
//! authoritative card list, hit-testing a release point against the column
//! layout, the drag gesture state machine, and the derived dashboard numbers.
//! The host (a terminal view, a browser shell, a test) is responsible only for
//! reporting drag events, supplying the current column layout at release, and
//! reacting to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Drag interaction controller ([`engine::BoardCore`]) |
//! | [`doc`] | Cards, columns, and the in-memory [`doc::CardStore`] |
//! | [`geom`] | Points and axis-aligned rectangles |
//! | [`input`] | Drag gesture state |
//! | [`hit`] | Drop-target resolution against column regions |
//! | [`metrics`] | Column badges, pipeline summary, currency formatting |
//! | [`wizard`] | Multi-step "new RFP" wizard |
//! | [`clients`] | Client list and add-client validation |
//! | [`detail`] | Documents and activity shown on a proposal's detail page |
//! | [`seed`] | Placeholder proposals, clients, and detail material |
//! | [`consts`] | Shared constants (layout defaults, wizard labels, client rules) |

pub mod clients;
pub mod consts;
pub mod detail;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod metrics;
pub mod seed;
pub mod wizard;
