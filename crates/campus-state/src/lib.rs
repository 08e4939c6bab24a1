//! # campus-state: Client-Side State for the Campus Directory
//!
//! The directory's client keeps a single immutable snapshot of what it
//! shows ([`ApplicationState`]) and moves between snapshots by feeding
//! [`Action`] descriptors through a pure [`reduce`] function.
//!
//! ## Pieces
//!
//! - **Actions** (`action.rs`): the closed set of transitions, tagged on
//!   `type` exactly as the wire sends them. Unknown kinds deserialize to
//!   [`Action::Unrecognized`] rather than failing.
//!
//! - **Reducer** (`reducer.rs`): `(&Arc<ApplicationState>, &Action) ->
//!   Arc<ApplicationState>`. Fields an action does not touch keep their
//!   `Arc`, so consumers detect "no change" with `Arc::ptr_eq`.
//!
//! - **Store** (`store.rs`): the injectable state holder with
//!   `get_state` / `dispatch` / `subscribe`. Nothing here is global.
//!
//! - **Thunks** (`thunk.rs`): async action creators that await a
//!   [`CampusRepository`](campus_core::CampusRepository) and then dispatch.
//!
//! - **View** (`view.rs`): pure presentation trees for a campus page and
//!   the campus list.

pub mod action;
pub mod reducer;
pub mod store;
pub mod thunk;
pub mod view;

pub use action::Action;
pub use reducer::{reduce, ApplicationState};
pub use store::{Store, SubscriptionId};
pub use thunk::{fetch_campus, fetch_campuses, post_campus};
pub use view::{campus_list, single_campus, Component, ViewNode};
