/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod client;
pub mod collector;
pub mod config;
pub mod errors;
pub mod json;
pub mod network;
pub mod planner;
pub mod range;
pub mod reconcile;
pub mod reference_set;
pub mod special_purpose;
pub mod token;
pub mod update;
