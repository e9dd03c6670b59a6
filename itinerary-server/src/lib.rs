//! Itinerary reconstruction server.
//!
//! A web service that answers: "here are all my tickets, in no particular
//! order; what was my trip?"

pub mod config;
pub mod domain;
pub mod itinerary;
pub mod web;
