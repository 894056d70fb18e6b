use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Body returned by the VM pricing calculator endpoint. Only `offers` is read.
#[derive(Debug, Deserialize)]
pub struct PricingResponse {
    pub offers: IndexMap<String, Offer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub cores: Number,
    pub ram: Number,
    pub disk_size: Number,
    /// A region can map to `null`; such offers are treated as unpriced there.
    pub prices: IndexMap<String, Option<Price>>,
}

#[derive(Debug, Deserialize)]
pub struct Price {
    pub value: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceRecord {
    pub instance_type: String,
    #[serde(rename = "CPU")]
    pub cpu: Number,
    pub memory: Number,
    pub storage: Number,
    pub cost: Number,
}
