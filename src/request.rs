//! Builders for stack set API request inputs.
//!
//! One function per operation, each a 1:1 mapping from the resource model (or plain arguments)
//! to an `aws-sdk-cloudformation` input. No field is validated here; absent stays absent and
//! the service remains the authority on well-formedness. The update builder is the exception
//! in that it runs [`reconcile`] to decide the tags to submit.

use aws_sdk_cloudformation::operation::{
    create_stack_instances::CreateStackInstancesInput, create_stack_set::CreateStackSetInput,
    delete_stack_instances::DeleteStackInstancesInput, delete_stack_set::DeleteStackSetInput,
    describe_stack_instance::DescribeStackInstanceInput, describe_stack_set::DescribeStackSetInput,
    describe_stack_set_operation::DescribeStackSetOperationInput,
    get_template_summary::GetTemplateSummaryInput, list_stack_instances::ListStackInstancesInput,
    list_stack_set_operation_results::ListStackSetOperationResultsInput,
    list_stack_sets::ListStackSetsInput, update_stack_instances::UpdateStackInstancesInput,
    update_stack_set::UpdateStackSetInput,
};
use aws_sdk_cloudformation::types::StackSetStatus;

use crate::{
    model::{
        into_sdk_parameters, AutoDeployment, CallAs, ManagedExecution, OperationPreferences,
        PermissionModel, StackInstances, StackSet,
    },
    tag::{self, reconcile, Tag},
    Error,
};

/// Page size for list requests.
const LIST_MAX_ITEMS: i32 = 100;

/// Build a `CreateStackSet` request from a resource model.
///
/// `tags` carries the desired tags (resource-declared plus stack-level), already aggregated by
/// the caller. An empty set is left absent rather than sent as an empty list.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn create_stack_set(
    model: &StackSet,
    client_request_token: Option<&str>,
    tags: &[Tag],
) -> Result<CreateStackSetInput, Error> {
    let input = CreateStackSetInput::builder()
        .set_stack_set_name(model.stack_set_name.clone())
        .set_administration_role_arn(model.administration_role_arn.clone())
        .set_auto_deployment(model.auto_deployment.clone().map(AutoDeployment::into_sdk))
        .set_client_request_token(client_request_token.map(ToOwned::to_owned))
        .set_permission_model(model.permission_model.map(PermissionModel::into_sdk))
        .set_capabilities(model.sdk_capabilities())
        .set_description(model.description.clone())
        .set_execution_role_name(model.execution_role_name.clone())
        .set_parameters(model.parameters.clone().map(into_sdk_parameters))
        .set_tags((!tags.is_empty()).then(|| tag::into_sdk_tags(tags)))
        .set_template_body(model.template_body.clone())
        .set_template_url(model.template_url.clone())
        .set_call_as(model.call_as.map(CallAs::into_sdk))
        .set_managed_execution(
            model
                .managed_execution
                .clone()
                .map(ManagedExecution::into_sdk),
        )
        .build()?;
    Ok(input)
}

/// Build a `CreateStackInstances` request for one group of stack instances.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn create_stack_instances(
    stack_set_name: &str,
    operation_preferences: Option<&OperationPreferences>,
    instances: &StackInstances,
    call_as: Option<CallAs>,
) -> Result<CreateStackInstancesInput, Error> {
    let input = CreateStackInstancesInput::builder()
        .stack_set_name(stack_set_name)
        .set_regions(Some(instances.regions.clone()))
        .set_operation_preferences(
            operation_preferences
                .cloned()
                .map(OperationPreferences::into_sdk),
        )
        .deployment_targets(instances.deployment_targets.clone().into_sdk())
        .set_parameter_overrides(instances.parameter_overrides.clone().map(into_sdk_parameters))
        .set_call_as(call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build an `UpdateStackInstances` request for one group of stack instances.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn update_stack_instances(
    stack_set_name: &str,
    operation_preferences: Option<&OperationPreferences>,
    instances: &StackInstances,
    call_as: Option<CallAs>,
) -> Result<UpdateStackInstancesInput, Error> {
    let input = UpdateStackInstancesInput::builder()
        .stack_set_name(stack_set_name)
        .set_regions(Some(instances.regions.clone()))
        .set_operation_preferences(
            operation_preferences
                .cloned()
                .map(OperationPreferences::into_sdk),
        )
        .deployment_targets(instances.deployment_targets.clone().into_sdk())
        .set_parameter_overrides(instances.parameter_overrides.clone().map(into_sdk_parameters))
        .set_call_as(call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build a `DeleteStackSet` request.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn delete_stack_set(
    stack_set_name: &str,
    call_as: Option<CallAs>,
) -> Result<DeleteStackSetInput, Error> {
    let input = DeleteStackSetInput::builder()
        .stack_set_name(stack_set_name)
        .set_call_as(call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build a `DeleteStackInstances` request for one group of stack instances.
///
/// `retain_stacks` controls whether the stacks behind the removed instances are kept or
/// deleted.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn delete_stack_instances(
    stack_set_name: &str,
    operation_preferences: Option<&OperationPreferences>,
    instances: &StackInstances,
    retain_stacks: bool,
    call_as: Option<CallAs>,
) -> Result<DeleteStackInstancesInput, Error> {
    let input = DeleteStackInstancesInput::builder()
        .stack_set_name(stack_set_name)
        .set_regions(Some(instances.regions.clone()))
        .set_operation_preferences(
            operation_preferences
                .cloned()
                .map(OperationPreferences::into_sdk),
        )
        .deployment_targets(instances.deployment_targets.clone().into_sdk())
        .retain_stacks(retain_stacks)
        .set_call_as(call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build an `UpdateStackSet` request from a resource model, reconciling tags.
///
/// The stack set is addressed by its ID. `previous_template` holds the tags the model declared
/// on the last successful update, `new_template` the tags it declares now, and `active` the
/// tags currently on the live stack set (as returned by a `DescribeStackSet` read). The
/// submitted tags are [`reconcile`]'s result: template-declared tags plus surviving
/// out-of-band tags.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn update_stack_set(
    model: &StackSet,
    previous_template: &[Tag],
    new_template: &[Tag],
    active: Vec<aws_sdk_cloudformation::types::Tag>,
) -> Result<UpdateStackSetInput, Error> {
    let active: Vec<Tag> = active.into_iter().map(Tag::from_sdk).collect();
    let tags_to_set = reconcile(&active, previous_template, new_template);

    let input = UpdateStackSetInput::builder()
        .set_stack_set_name(model.stack_set_id.clone())
        .set_administration_role_arn(model.administration_role_arn.clone())
        .set_auto_deployment(model.auto_deployment.clone().map(AutoDeployment::into_sdk))
        .set_operation_preferences(
            model
                .operation_preferences
                .clone()
                .map(OperationPreferences::into_sdk),
        )
        .set_capabilities(model.sdk_capabilities())
        .set_description(model.description.clone())
        .set_execution_role_name(model.execution_role_name.clone())
        .set_parameters(model.parameters.clone().map(into_sdk_parameters))
        .set_template_url(model.template_url.clone())
        .set_template_body(model.template_body.clone())
        // Always set: an empty reconciled set must clear the remaining tags.
        .set_tags(Some(tag::into_sdk_tags(&tags_to_set)))
        .set_call_as(model.call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build an `UpdateStackSet` request that only touches the managed execution setting.
///
/// The request reuses the previous template and carries the model's roles and capabilities, so
/// that it cannot accidentally trigger a deployment or a role change.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn update_managed_execution(model: &StackSet) -> Result<UpdateStackSetInput, Error> {
    let input = UpdateStackSetInput::builder()
        .set_stack_set_name(model.stack_set_id.clone())
        .set_managed_execution(
            model
                .managed_execution
                .clone()
                .map(ManagedExecution::into_sdk),
        )
        .set_administration_role_arn(model.administration_role_arn.clone())
        .set_execution_role_name(model.execution_role_name.clone())
        .set_capabilities(model.sdk_capabilities())
        .use_previous_template(true)
        .set_call_as(model.call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build a `ListStackSets` request for one page of active stack sets.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn list_stack_sets(next_token: Option<&str>) -> Result<ListStackSetsInput, Error> {
    let input = ListStackSetsInput::builder()
        .max_results(LIST_MAX_ITEMS)
        .set_next_token(next_token.map(ToOwned::to_owned))
        .status(StackSetStatus::Active)
        .build()?;
    Ok(input)
}

/// Build a `ListStackInstances` request for one page of instances.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn list_stack_instances(
    next_token: Option<&str>,
    stack_set_name: &str,
    call_as: Option<CallAs>,
) -> Result<ListStackInstancesInput, Error> {
    let input = ListStackInstancesInput::builder()
        .max_results(LIST_MAX_ITEMS)
        .set_next_token(next_token.map(ToOwned::to_owned))
        .stack_set_name(stack_set_name)
        .set_call_as(call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build a `DescribeStackSet` request.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn describe_stack_set(
    stack_set_id: &str,
    call_as: Option<CallAs>,
) -> Result<DescribeStackSetInput, Error> {
    let input = DescribeStackSetInput::builder()
        .stack_set_name(stack_set_id)
        .set_call_as(call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build a `DescribeStackInstance` request for one account and region.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn describe_stack_instance(
    account: &str,
    region: &str,
    stack_set_id: &str,
    call_as: Option<CallAs>,
) -> Result<DescribeStackInstanceInput, Error> {
    let input = DescribeStackInstanceInput::builder()
        .stack_instance_account(account)
        .stack_instance_region(region)
        .stack_set_name(stack_set_id)
        .set_call_as(call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build a `DescribeStackSetOperation` request.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn describe_stack_set_operation(
    stack_set_name: &str,
    operation_id: &str,
    call_as: Option<CallAs>,
) -> Result<DescribeStackSetOperationInput, Error> {
    let input = DescribeStackSetOperationInput::builder()
        .stack_set_name(stack_set_name)
        .operation_id(operation_id)
        .set_call_as(call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

/// Build a `GetTemplateSummary` request for a template body or URL.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn get_template_summary(
    template_body: Option<&str>,
    template_url: Option<&str>,
) -> Result<GetTemplateSummaryInput, Error> {
    let input = GetTemplateSummaryInput::builder()
        .set_template_body(template_body.map(ToOwned::to_owned))
        .set_template_url(template_url.map(ToOwned::to_owned))
        .build()?;
    Ok(input)
}

/// Build a `ListStackSetOperationResults` request for one page of per-target results.
///
/// # Errors
///
/// Returns [`Error::Build`] if the SDK rejects the assembled input.
pub fn list_stack_set_operation_results(
    next_token: Option<&str>,
    stack_set_name: &str,
    operation_id: &str,
    call_as: Option<CallAs>,
) -> Result<ListStackSetOperationResultsInput, Error> {
    let input = ListStackSetOperationResultsInput::builder()
        .max_results(LIST_MAX_ITEMS)
        .set_next_token(next_token.map(ToOwned::to_owned))
        .stack_set_name(stack_set_name)
        .operation_id(operation_id)
        .set_call_as(call_as.map(CallAs::into_sdk))
        .build()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use aws_sdk_cloudformation::types as sdk;

    use super::*;
    use crate::model::{Capability, DeploymentTargets, Parameter, RegionConcurrencyType};

    fn model() -> StackSet {
        StackSet {
            stack_set_name: Some("my-stack-set".to_string()),
            stack_set_id: Some("my-stack-set:1234".to_string()),
            administration_role_arn: Some("arn:aws:iam::123456789012:role/admin".to_string()),
            auto_deployment: Some(AutoDeployment {
                enabled: Some(true),
                retain_stacks_on_account_removal: Some(false),
            }),
            capabilities: Capability::Iam | Capability::AutoExpand,
            description: Some("A test stack set".to_string()),
            execution_role_name: Some("execution-role".to_string()),
            managed_execution: Some(ManagedExecution { active: Some(true) }),
            operation_preferences: Some(OperationPreferences {
                region_concurrency_type: Some(RegionConcurrencyType::Parallel),
                max_concurrent_count: Some(2),
                ..OperationPreferences::default()
            }),
            parameters: Some(vec![Parameter {
                parameter_key: Some("CidrBlock".to_string()),
                parameter_value: Some("10.0.0.0/16".to_string()),
            }]),
            permission_model: Some(PermissionModel::ServiceManaged),
            template_url: Some("https://bucket.s3.amazonaws.com/template.json".to_string()),
            call_as: Some(CallAs::DelegatedAdmin),
            ..StackSet::default()
        }
    }

    fn instances() -> StackInstances {
        StackInstances {
            deployment_targets: DeploymentTargets {
                organizational_unit_ids: Some(vec!["ou-abcd-11111111".to_string()]),
                ..DeploymentTargets::default()
            },
            regions: vec!["eu-west-2".to_string(), "us-east-1".to_string()],
            parameter_overrides: None,
        }
    }

    fn tag_pairs(tags: &[sdk::Tag]) -> Vec<(&str, &str)> {
        tags.iter()
            .map(|tag| (tag.key().unwrap(), tag.value().unwrap()))
            .collect()
    }

    #[test]
    fn create_stack_set_maps_model_fields() {
        let input = create_stack_set(&model(), Some("token"), &[Tag::new("hello", "world")])
            .expect("create_stack_set");

        assert_eq!(input.stack_set_name(), Some("my-stack-set"));
        assert_eq!(
            input.administration_role_arn(),
            Some("arn:aws:iam::123456789012:role/admin")
        );
        assert_eq!(input.client_request_token(), Some("token"));
        assert_eq!(
            input.permission_model(),
            Some(&sdk::PermissionModels::ServiceManaged)
        );
        assert_eq!(
            input.capabilities(),
            [
                sdk::Capability::CapabilityIam,
                sdk::Capability::CapabilityAutoExpand
            ]
        );
        assert_eq!(input.description(), Some("A test stack set"));
        assert_eq!(input.execution_role_name(), Some("execution-role"));
        assert_eq!(
            input.parameters()[0].parameter_key(),
            Some("CidrBlock")
        );
        assert_eq!(tag_pairs(input.tags()), [("hello", "world")]);
        assert_eq!(input.template_body(), None);
        assert_eq!(
            input.template_url(),
            Some("https://bucket.s3.amazonaws.com/template.json")
        );
        assert_eq!(input.call_as(), Some(&sdk::CallAs::DelegatedAdmin));
        let auto_deployment = input.auto_deployment().expect("auto_deployment");
        assert_eq!(auto_deployment.enabled(), Some(true));
        assert_eq!(auto_deployment.retain_stacks_on_account_removal(), Some(false));
        let managed_execution = input.managed_execution().expect("managed_execution");
        assert_eq!(managed_execution.active(), Some(true));
    }

    #[test]
    fn create_stack_set_leaves_absent_fields_absent() {
        let input =
            create_stack_set(&StackSet::default(), None, &[]).expect("create_stack_set");

        assert_eq!(input.stack_set_name(), None);
        assert_eq!(input.administration_role_arn(), None);
        assert_eq!(input.client_request_token(), None);
        assert_eq!(input.permission_model(), None);
        assert!(input.capabilities().is_empty());
        assert_eq!(input.tags, None);
        assert_eq!(input.template_body(), None);
        assert_eq!(input.template_url(), None);
        assert_eq!(input.call_as(), None);
        assert_eq!(input.auto_deployment(), None);
        assert_eq!(input.managed_execution(), None);
    }

    #[test]
    fn create_stack_instances_maps_fields() {
        let preferences = OperationPreferences {
            region_concurrency_type: Some(RegionConcurrencyType::Sequential),
            ..OperationPreferences::default()
        };
        let input = create_stack_instances(
            "my-stack-set",
            Some(&preferences),
            &instances(),
            Some(CallAs::SelfValue),
        )
        .expect("create_stack_instances");

        assert_eq!(input.stack_set_name(), Some("my-stack-set"));
        assert_eq!(input.regions(), ["eu-west-2", "us-east-1"]);
        assert_eq!(
            input
                .deployment_targets()
                .expect("deployment_targets")
                .organizational_unit_ids(),
            ["ou-abcd-11111111"]
        );
        assert_eq!(
            input
                .operation_preferences()
                .expect("operation_preferences")
                .region_concurrency_type(),
            Some(&sdk::RegionConcurrencyType::Sequential)
        );
        assert!(input.parameter_overrides().is_empty());
        assert_eq!(input.call_as(), Some(&sdk::CallAs::SelfValue));
    }

    #[test]
    fn update_stack_instances_maps_fields() {
        let input = update_stack_instances("my-stack-set", None, &instances(), None)
            .expect("update_stack_instances");

        assert_eq!(input.stack_set_name(), Some("my-stack-set"));
        assert_eq!(input.regions(), ["eu-west-2", "us-east-1"]);
        assert_eq!(input.operation_preferences(), None);
        assert_eq!(input.call_as(), None);
    }

    #[test]
    fn delete_stack_set_maps_fields() {
        let input = delete_stack_set("my-stack-set", Some(CallAs::DelegatedAdmin))
            .expect("delete_stack_set");

        assert_eq!(input.stack_set_name(), Some("my-stack-set"));
        assert_eq!(input.call_as(), Some(&sdk::CallAs::DelegatedAdmin));
    }

    #[test]
    fn delete_stack_instances_maps_fields() {
        let input = delete_stack_instances("my-stack-set", None, &instances(), true, None)
            .expect("delete_stack_instances");

        assert_eq!(input.stack_set_name(), Some("my-stack-set"));
        assert_eq!(input.regions(), ["eu-west-2", "us-east-1"]);
        assert_eq!(input.retain_stacks(), Some(true));
        // Deleting instances never carries parameter overrides.
        assert!(input.deployment_targets().is_some());
    }

    #[test]
    fn update_stack_set_addresses_by_id_and_reconciles_tags() {
        let previous = [Tag::new("a", "1")];
        let new = [Tag::new("a", "1"), Tag::new("b", "2")];
        let active = vec![
            Tag::new("a", "1").into_sdk(),
            Tag::new("x", "9").into_sdk(),
        ];

        let input =
            update_stack_set(&model(), &previous, &new, active).expect("update_stack_set");

        assert_eq!(input.stack_set_name(), Some("my-stack-set:1234"));
        assert_eq!(
            tag_pairs(input.tags()),
            [("a", "1"), ("b", "2"), ("x", "9")]
        );
        assert_eq!(
            input.template_url(),
            Some("https://bucket.s3.amazonaws.com/template.json")
        );
        assert_eq!(
            input
                .operation_preferences()
                .expect("operation_preferences")
                .max_concurrent_count(),
            Some(2)
        );
        assert_eq!(
            input.capabilities(),
            [
                sdk::Capability::CapabilityIam,
                sdk::Capability::CapabilityAutoExpand
            ]
        );
        // The update must not touch managed execution; that has a dedicated request.
        assert_eq!(input.managed_execution(), None);
        assert_eq!(input.use_previous_template(), None);
    }

    #[test]
    fn update_stack_set_clears_tags_when_reconciliation_is_empty() {
        let previous = [Tag::new("a", "1")];
        let active = vec![Tag::new("a", "1").into_sdk()];

        let input = update_stack_set(&model(), &previous, &[], active).expect("update_stack_set");

        // An explicit empty list removes the remaining template-managed tag.
        assert_eq!(input.tags, Some(Vec::new()));
    }

    #[test]
    fn update_managed_execution_reuses_previous_template() {
        let input = update_managed_execution(&model()).expect("update_managed_execution");

        assert_eq!(input.stack_set_name(), Some("my-stack-set:1234"));
        assert_eq!(input.use_previous_template(), Some(true));
        assert_eq!(
            input.managed_execution().expect("managed_execution").active(),
            Some(true)
        );
        assert_eq!(
            input.administration_role_arn(),
            Some("arn:aws:iam::123456789012:role/admin")
        );
        assert_eq!(input.execution_role_name(), Some("execution-role"));
        assert_eq!(input.call_as(), Some(&sdk::CallAs::DelegatedAdmin));
        // No template or parameters: the request must not redeploy anything.
        assert_eq!(input.template_body(), None);
        assert_eq!(input.template_url(), None);
        assert!(input.parameters().is_empty());
    }

    #[test]
    fn list_stack_sets_pages_active_stack_sets() {
        let input = list_stack_sets(Some("next")).expect("list_stack_sets");

        assert_eq!(input.max_results(), Some(100));
        assert_eq!(input.next_token(), Some("next"));
        assert_eq!(input.status(), Some(&sdk::StackSetStatus::Active));

        let first_page = list_stack_sets(None).expect("list_stack_sets");
        assert_eq!(first_page.next_token(), None);
    }

    #[test]
    fn list_stack_instances_maps_fields() {
        let input = list_stack_instances(None, "my-stack-set", Some(CallAs::SelfValue))
            .expect("list_stack_instances");

        assert_eq!(input.max_results(), Some(100));
        assert_eq!(input.next_token(), None);
        assert_eq!(input.stack_set_name(), Some("my-stack-set"));
        assert_eq!(input.call_as(), Some(&sdk::CallAs::SelfValue));
    }

    #[test]
    fn describe_stack_set_maps_fields() {
        let input =
            describe_stack_set("my-stack-set:1234", None).expect("describe_stack_set");

        assert_eq!(input.stack_set_name(), Some("my-stack-set:1234"));
        assert_eq!(input.call_as(), None);
    }

    #[test]
    fn describe_stack_instance_maps_fields() {
        let input = describe_stack_instance(
            "123456789012",
            "eu-west-2",
            "my-stack-set:1234",
            Some(CallAs::DelegatedAdmin),
        )
        .expect("describe_stack_instance");

        assert_eq!(input.stack_instance_account(), Some("123456789012"));
        assert_eq!(input.stack_instance_region(), Some("eu-west-2"));
        assert_eq!(input.stack_set_name(), Some("my-stack-set:1234"));
        assert_eq!(input.call_as(), Some(&sdk::CallAs::DelegatedAdmin));
    }

    #[test]
    fn describe_stack_set_operation_maps_fields() {
        let input = describe_stack_set_operation("my-stack-set", "op-1", None)
            .expect("describe_stack_set_operation");

        assert_eq!(input.stack_set_name(), Some("my-stack-set"));
        assert_eq!(input.operation_id(), Some("op-1"));
    }

    #[test]
    fn get_template_summary_maps_fields() {
        let input = get_template_summary(Some("{}"), None).expect("get_template_summary");
        assert_eq!(input.template_body(), Some("{}"));
        assert_eq!(input.template_url(), None);

        let input = get_template_summary(None, Some("https://example.com/template.json"))
            .expect("get_template_summary");
        assert_eq!(input.template_body(), None);
        assert_eq!(
            input.template_url(),
            Some("https://example.com/template.json")
        );
    }

    #[test]
    fn list_stack_set_operation_results_maps_fields() {
        let input = list_stack_set_operation_results(Some("next"), "my-stack-set", "op-1", None)
            .expect("list_stack_set_operation_results");

        assert_eq!(input.max_results(), Some(100));
        assert_eq!(input.next_token(), Some("next"));
        assert_eq!(input.stack_set_name(), Some("my-stack-set"));
        assert_eq!(input.operation_id(), Some("op-1"));
    }
}
