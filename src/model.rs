//! The stack set custom resource model and its translation to SDK types.
//!
//! These are owned value types mirroring the JSON document the resource provider contract
//! delivers (PascalCase keys). Each type converts losslessly into its
//! `aws_sdk_cloudformation::types` counterpart; absent fields stay absent.

use std::str::FromStr;

use aws_sdk_cloudformation::types as sdk;
use enumset::EnumSet;
use serde_plain::forward_display_to_serde;

use crate::{Error, Tag};

/// An error marker returned when trying to parse an invalid enum value.
#[derive(Debug, Eq, PartialEq)]
pub struct InvalidValue;

/// A stack set resource model.
///
/// This is the desired state a template declares for an `AWS::CloudFormation::StackSet`
/// resource. Every field is optional from the crate's perspective; requests pass absent fields
/// through unset and leave validation to the service.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StackSet {
    /// The name to associate with the stack set.
    ///
    /// The name must be unique in the region where it is created.
    pub stack_set_name: Option<String>,

    /// The ID of the stack set, assigned by the service on creation.
    ///
    /// This is the primary identifier; updates address the stack set by ID.
    pub stack_set_id: Option<String>,

    /// The Amazon Resource Name (ARN) of the IAM role to use to create this stack set.
    ///
    /// Specify a role only if you are using customized administrator roles to control which
    /// users or groups can manage specific stack sets within the same administrator account.
    #[serde(rename = "AdministrationRoleARN")]
    pub administration_role_arn: Option<String>,

    /// Whether the stack set deploys automatically to organization accounts that are added to
    /// the target organizational units.
    pub auto_deployment: Option<AutoDeployment>,

    /// Capabilities the template requires you to explicitly acknowledge.
    ///
    /// See [`Capability`] for more information.
    pub capabilities: EnumSet<Capability>,

    /// A description of the stack set.
    pub description: Option<String>,

    /// The name of the IAM execution role to use to create the stack set.
    ///
    /// If you do not specify an execution role, the service uses the
    /// `AWSCloudFormationStackSetExecutionRole` role for the stack set operation.
    pub execution_role_name: Option<String>,

    /// Whether the service can queue conflicting operations instead of failing them.
    pub managed_execution: Option<ManagedExecution>,

    /// Preferences for how the service performs stack set operations.
    pub operation_preferences: Option<OperationPreferences>,

    /// Input parameters for the stack set template.
    pub parameters: Option<Vec<Parameter>>,

    /// Describes how the IAM roles required for stack set operations are created.
    pub permission_model: Option<PermissionModel>,

    /// Groups of stack instances the stack set deploys, each with its own deployment targets
    /// and regions.
    pub stack_instances_group: Option<Vec<StackInstances>>,

    /// Key-value pairs to associate with this stack set and the stacks created from it.
    ///
    /// A maximum number of 50 tags can be specified.
    pub tags: Option<Vec<Tag>>,

    /// The structure that contains the template body.
    ///
    /// Conditional: you must specify either the `template_body` or the `template_url`
    /// parameter, but not both.
    pub template_body: Option<String>,

    /// The URL of a file containing the template body.
    ///
    /// The URL must point to a template in an Amazon S3 bucket.
    ///
    /// Conditional: you must specify either the `template_body` or the `template_url`
    /// parameter, but not both.
    #[serde(rename = "TemplateURL")]
    pub template_url: Option<String>,

    /// The authorization context the service calls are made in.
    ///
    /// See [`CallAs`] for more information.
    pub call_as: Option<CallAs>,
}

impl StackSet {
    /// Deserialize a resource model from its JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] if the document is not valid JSON or does not have the model's
    /// shape. Unknown keys are ignored; missing keys are treated as absent.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn sdk_capabilities(&self) -> Option<Vec<sdk::Capability>> {
        if self.capabilities.is_empty() {
            None
        } else {
            Some(self.capabilities.iter().map(Capability::into_sdk).collect())
        }
    }
}

/// Auto-deployment configuration for a service-managed stack set.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutoDeployment {
    /// Whether the stack set deploys automatically to accounts added to the target
    /// organizational units.
    pub enabled: Option<bool>,

    /// Whether stacks are retained when an account is removed from a target organizational
    /// unit.
    pub retain_stacks_on_account_removal: Option<bool>,
}

impl AutoDeployment {
    pub(crate) fn into_sdk(self) -> sdk::AutoDeployment {
        sdk::AutoDeployment::builder()
            .set_enabled(self.enabled)
            .set_retain_stacks_on_account_removal(self.retain_stacks_on_account_removal)
            .build()
    }
}

/// Managed execution configuration for a stack set.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ManagedExecution {
    /// When `true`, the service queues conflicting operations and runs them in a
    /// non-conflicting order; when `false`, conflicting operations fail.
    pub active: Option<bool>,
}

impl ManagedExecution {
    pub(crate) fn into_sdk(self) -> sdk::ManagedExecution {
        sdk::ManagedExecution::builder().set_active(self.active).build()
    }
}

/// Preferences for how the service performs a stack set operation.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OperationPreferences {
    /// Whether regions are deployed sequentially or in parallel.
    pub region_concurrency_type: Option<RegionConcurrencyType>,

    /// The order of the regions in which to perform the operation.
    pub region_order: Option<Vec<String>>,

    /// The number of accounts, per region, the operation can fail in before the service stops
    /// the operation in that region.
    pub failure_tolerance_count: Option<i32>,

    /// The same threshold, expressed as a percentage of accounts per region.
    pub failure_tolerance_percentage: Option<i32>,

    /// The maximum number of accounts to perform the operation in at one time.
    pub max_concurrent_count: Option<i32>,

    /// The same limit, expressed as a percentage of accounts.
    pub max_concurrent_percentage: Option<i32>,

    /// How failure tolerance interacts with concurrency.
    pub concurrency_mode: Option<ConcurrencyMode>,
}

impl OperationPreferences {
    pub(crate) fn into_sdk(self) -> sdk::StackSetOperationPreferences {
        sdk::StackSetOperationPreferences::builder()
            .set_region_concurrency_type(
                self.region_concurrency_type
                    .map(RegionConcurrencyType::into_sdk),
            )
            .set_region_order(self.region_order)
            .set_failure_tolerance_count(self.failure_tolerance_count)
            .set_failure_tolerance_percentage(self.failure_tolerance_percentage)
            .set_max_concurrent_count(self.max_concurrent_count)
            .set_max_concurrent_percentage(self.max_concurrent_percentage)
            .set_concurrency_mode(self.concurrency_mode.map(ConcurrencyMode::into_sdk))
            .build()
    }
}

/// The accounts or organizational units a group of stack instances deploys to.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeploymentTargets {
    /// The account IDs to deploy to.
    pub accounts: Option<Vec<String>>,

    /// The organization root ID or organizational unit IDs to deploy to.
    pub organizational_unit_ids: Option<Vec<String>>,

    /// How `accounts` filters the accounts in the targeted organizational units.
    pub account_filter_type: Option<AccountFilterType>,
}

impl DeploymentTargets {
    pub(crate) fn into_sdk(self) -> sdk::DeploymentTargets {
        sdk::DeploymentTargets::builder()
            .set_accounts(self.accounts)
            .set_organizational_unit_ids(self.organizational_unit_ids)
            .set_account_filter_type(self.account_filter_type.map(AccountFilterType::into_sdk))
            .build()
    }
}

/// A group of stack instances: deployment targets, regions, and any parameter overrides.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StackInstances {
    /// The accounts or organizational units to deploy to.
    pub deployment_targets: DeploymentTargets,

    /// The regions to deploy to, for each target.
    pub regions: Vec<String>,

    /// Parameter values that override the stack set's parameters in these instances.
    pub parameter_overrides: Option<Vec<Parameter>>,
}

/// An input parameter for a stack set template.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Parameter {
    /// The key associated with the parameter.
    pub parameter_key: Option<String>,

    /// The input value associated with the parameter.
    pub parameter_value: Option<String>,
}

impl Parameter {
    pub(crate) fn into_sdk(self) -> sdk::Parameter {
        sdk::Parameter::builder()
            .set_parameter_key(self.parameter_key)
            .set_parameter_value(self.parameter_value)
            .build()
    }
}

pub(crate) fn into_sdk_parameters(parameters: Vec<Parameter>) -> Vec<sdk::Parameter> {
    parameters.into_iter().map(Parameter::into_sdk).collect()
}

/// In some cases, you must explicitly acknowledge that your stack set template contains certain
/// capabilities in order for the service to create the stack set.
///
/// - `CAPABILITY_IAM` and `CAPABILITY_NAMED_IAM`
///
///   Some templates include resources that can affect permissions in the target accounts; for
///   example, by creating new AWS Identity and Access Management (IAM) users. For those stack
///   sets, you must explicitly acknowledge this by specifying one of these capabilities. If you
///   have IAM resources with custom names, you *must* specify `CAPABILITY_NAMED_IAM`.
///
/// - `CAPABILITY_AUTO_EXPAND`
///
///   Some templates contain macros, which perform custom processing on templates. Stack sets do
///   not currently support templates that use macros other than the `AWS::Include` and
///   `AWS::Serverless` transforms, even with this capability specified.
#[derive(Debug, enumset::EnumSetType, serde::Deserialize, serde::Serialize)]
#[enumset(serialize_repr = "list")]
pub enum Capability {
    /// Acknowledge IAM resources (*without* custom names only).
    #[serde(rename = "CAPABILITY_IAM")]
    Iam,

    /// Acknowledge IAM resources (with or without custom names).
    #[serde(rename = "CAPABILITY_NAMED_IAM")]
    NamedIam,

    /// Acknowledge macro expansion.
    #[serde(rename = "CAPABILITY_AUTO_EXPAND")]
    AutoExpand,
}

forward_display_to_serde!(Capability);

impl Capability {
    pub(crate) fn into_sdk(self) -> sdk::Capability {
        match self {
            Self::Iam => sdk::Capability::CapabilityIam,
            Self::NamedIam => sdk::Capability::CapabilityNamedIam,
            Self::AutoExpand => sdk::Capability::CapabilityAutoExpand,
        }
    }
}

/// Describes how the IAM roles required for stack set operations are created.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionModel {
    /// The service creates the IAM roles required to deploy to accounts managed by AWS
    /// Organizations.
    ServiceManaged,

    /// You must create the administrator and execution roles required to deploy to target
    /// accounts.
    SelfManaged,
}

forward_display_to_serde!(PermissionModel);

impl FromStr for PermissionModel {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s).map_err(|_| InvalidValue)
    }
}

impl PermissionModel {
    pub(crate) fn into_sdk(self) -> sdk::PermissionModels {
        match self {
            Self::ServiceManaged => sdk::PermissionModels::ServiceManaged,
            Self::SelfManaged => sdk::PermissionModels::SelfManaged,
        }
    }
}

/// The authorization context service calls are made in.
///
/// By default, requests are made against the account they run in (`SELF`). A delegated
/// administrator of a service-managed stack set specifies `DELEGATED_ADMIN` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum CallAs {
    /// Make the calls as the account the request runs in.
    #[serde(rename = "SELF")]
    SelfValue,

    /// Make the calls as a delegated administrator of the organization's management account.
    #[serde(rename = "DELEGATED_ADMIN")]
    DelegatedAdmin,
}

forward_display_to_serde!(CallAs);

impl FromStr for CallAs {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s).map_err(|_| InvalidValue)
    }
}

impl CallAs {
    pub(crate) fn into_sdk(self) -> sdk::CallAs {
        match self {
            Self::SelfValue => sdk::CallAs::SelfValue,
            Self::DelegatedAdmin => sdk::CallAs::DelegatedAdmin,
        }
    }
}

/// Whether a stack set operation deploys to regions sequentially or in parallel.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegionConcurrencyType {
    Sequential,
    Parallel,
}

forward_display_to_serde!(RegionConcurrencyType);

impl FromStr for RegionConcurrencyType {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s).map_err(|_| InvalidValue)
    }
}

impl RegionConcurrencyType {
    pub(crate) fn into_sdk(self) -> sdk::RegionConcurrencyType {
        match self {
            Self::Sequential => sdk::RegionConcurrencyType::Sequential,
            Self::Parallel => sdk::RegionConcurrencyType::Parallel,
        }
    }
}

/// How failure tolerance interacts with concurrency during a stack set operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConcurrencyMode {
    /// Deployment speed is throttled down as the failure tolerance is approached.
    StrictFailureTolerance,

    /// Deployment proceeds at full concurrency regardless of the failure tolerance.
    SoftFailureTolerance,
}

forward_display_to_serde!(ConcurrencyMode);

impl FromStr for ConcurrencyMode {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s).map_err(|_| InvalidValue)
    }
}

impl ConcurrencyMode {
    pub(crate) fn into_sdk(self) -> sdk::ConcurrencyMode {
        match self {
            Self::StrictFailureTolerance => sdk::ConcurrencyMode::StrictFailureTolerance,
            Self::SoftFailureTolerance => sdk::ConcurrencyMode::SoftFailureTolerance,
        }
    }
}

/// How explicitly listed accounts filter the accounts in targeted organizational units.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountFilterType {
    None,
    Intersection,
    Difference,
    Union,
}

forward_display_to_serde!(AccountFilterType);

impl FromStr for AccountFilterType {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s).map_err(|_| InvalidValue)
    }
}

impl AccountFilterType {
    pub(crate) fn into_sdk(self) -> sdk::AccountFilterType {
        match self {
            Self::None => sdk::AccountFilterType::None,
            Self::Intersection => sdk::AccountFilterType::Intersection,
            Self::Difference => sdk::AccountFilterType::Difference,
            Self::Union => sdk::AccountFilterType::Union,
        }
    }
}
