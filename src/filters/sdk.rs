//! Service-specific filter record shapes
//!
//! One module per supported service, each exposing the filter record the
//! service's list APIs accept. Wire names are the services' PascalCase
//! conventions; the module set mirrors `services::SLICE_SERVICE_NAMES`
//! (with `databasemigrationservice` aliased to `dms`).

macro_rules! filter_service {
    ($name:ident, $type:ident, $name_field:ident => $wire_name:literal) => {
        pub mod $name {
            use serde::{Deserialize, Serialize};

            #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
            pub struct $type {
                #[serde(rename = $wire_name)]
                pub $name_field: String,
                #[serde(rename = "Values")]
                pub values: Vec<String>,
            }
        }
    };
}

filter_service!(autoscaling, Filter, name => "Name");
filter_service!(dms, Filter, name => "Name");
filter_service!(docdb, Filter, name => "Name");
filter_service!(ec2, Filter, name => "Name");
filter_service!(elasticinference, Filter, name => "Name");
filter_service!(elasticsearchservice, Filter, name => "Name");
filter_service!(fsx, Filter, name => "Name");
filter_service!(imagebuilder, Filter, name => "Name");
filter_service!(licensemanager, Filter, name => "Name");
filter_service!(neptune, Filter, name => "Name");
filter_service!(rds, Filter, name => "Name");
filter_service!(resourcegroupstaggingapi, TagFilter, key => "Key");
filter_service!(route53resolver, Filter, name => "Name");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_serializes_with_wire_names() {
        let filter = ec2::Filter {
            name: "instance-type".to_string(),
            values: vec!["t3.micro".to_string(), "t3.small".to_string()],
        };

        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Name": "instance-type",
                "Values": ["t3.micro", "t3.small"]
            })
        );
    }

    #[test]
    fn test_tag_filter_uses_key_field() {
        let filter = resourcegroupstaggingapi::TagFilter {
            key: "Environment".to_string(),
            values: vec!["production".to_string()],
        };

        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Key": "Environment",
                "Values": ["production"]
            })
        );
    }
}
