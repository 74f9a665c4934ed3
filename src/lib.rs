#![warn(clippy::pedantic)]

//! Request builders for CloudFormation stack set operations.
//!
//! This is a pure data-shaping layer over `aws-sdk-cloudformation`: it converts a stack set
//! resource model ([`StackSet`]) into the request inputs for the stack set APIs, one function
//! per operation (see [`request`]). There is no client, no retry policy and no pagination here;
//! callers hand the inputs to the SDK and deal with the service themselves.
//!
//! The one piece of logic that is more than field mapping is [`reconcile`], which decides the
//! tags to submit on update: template-declared tags win, tags added outside the template
//! survive.

mod error;
mod model;
mod tag;

pub mod request;

pub use error::Error;
pub use model::{
    AccountFilterType, AutoDeployment, CallAs, Capability, ConcurrencyMode, DeploymentTargets,
    InvalidValue, ManagedExecution, OperationPreferences, Parameter, PermissionModel,
    RegionConcurrencyType, StackInstances, StackSet,
};
pub use tag::{reconcile, Tag};
