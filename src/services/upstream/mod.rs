//! Client for the case frontend's pending-invitation API
//!
//! `GET  {base}/api/pending-invitations?accessToken=…` lists pending invitations.
//! `PUT  {base}/api/pending-invitations/done?accessToken=…` takes a JSON array of
//! invitation ids and marks them done.

mod client;

pub use client::UpstreamClient;
