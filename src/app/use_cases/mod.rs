//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Synchron und ohne Gateway-Zugriff; die Handler rufen die Gateways auf
//! und uebergeben die Ergebnisse hierher.

pub mod drag;
pub mod members;
