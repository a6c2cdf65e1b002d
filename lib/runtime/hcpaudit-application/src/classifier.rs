use hcpaudit_domain::{
    ANNOTATION_CLUSTER_SIZE_OVERRIDE, ANNOTATION_RECOMMENDED_CLUSTER_SIZE,
    ANNOTATION_RESOURCE_BASED_AUTOSCALING, LABEL_CLUSTER_ID, LABEL_HOSTED_CLUSTER_SIZE,
    SIZE_NOT_AVAILABLE, TenantRecord, TenantResource,
};

pub fn classify(tenant: &TenantResource) -> TenantRecord {
    TenantRecord {
        cluster_id: tenant.label(LABEL_CLUSTER_ID).unwrap_or_default().to_string(),
        cluster_name: tenant.name.clone(),
        namespace: tenant.namespace.clone(),
        autoscaling_enabled: tenant.annotation(ANNOTATION_RESOURCE_BASED_AUTOSCALING)
            == Some("true"),
        has_override_annotation: tenant.annotation(ANNOTATION_CLUSTER_SIZE_OVERRIDE).is_some(),
        current_size: size_or_sentinel(tenant.label(LABEL_HOSTED_CLUSTER_SIZE)),
        recommended_size: size_or_sentinel(tenant.annotation(ANNOTATION_RECOMMENDED_CLUSTER_SIZE)),
    }
}

fn size_or_sentinel(value: Option<&str>) -> String {
    match value {
        Some(size) if !size.is_empty() => size.to_string(),
        _ => SIZE_NOT_AVAILABLE.to_string(),
    }
}
