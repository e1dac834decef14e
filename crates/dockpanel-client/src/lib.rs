//! # dockpanel-client
//!
//! Talks to the remote container-management API.
//!
//! - [`ContainerApi`](api::ContainerApi): the seam the dispatcher and the
//!   dashboard are written against.
//! - [`HttpApi`](http::HttpApi): the `reqwest` implementation used in
//!   production.

pub mod api;
pub mod http;

pub use api::ContainerApi;
pub use http::HttpApi;
