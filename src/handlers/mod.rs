pub mod rsvp_handlers;
