//! Static per-service filter metadata
//!
//! One literal table drives both the generated accessors and the code
//! generator: for each service, the SDK module alias, the filter record
//! type name, and the field names used for the filter's name and values.
//! Lookups are explicit table hits; nothing is derived by convention.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Service names with a `Vec<Filter>`-style list filter, sorted
pub const SLICE_SERVICE_NAMES: [&str; 13] = [
    "autoscaling",
    "databasemigrationservice",
    "docdb",
    "ec2",
    "elasticinference",
    "elasticsearchservice",
    "fsx",
    "imagebuilder",
    "licensemanager",
    "neptune",
    "rds",
    "resourcegroupstaggingapi",
    "route53resolver",
];

/// Per-service facts needed to emit an accessor method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceFilterMeta {
    /// SDK module alias (usually the service name itself)
    pub package: &'static str,
    /// Filter record type name
    pub filter_type: &'static str,
    /// Field holding the filter's name
    pub name_field: &'static str,
    /// Field holding the filter's values
    pub values_field: &'static str,
}

const DEFAULT_FILTER_TYPE: &str = "Filter";
const DEFAULT_NAME_FIELD: &str = "name";
const DEFAULT_VALUES_FIELD: &str = "values";

fn default_meta(package: &'static str) -> ServiceFilterMeta {
    ServiceFilterMeta {
        package,
        filter_type: DEFAULT_FILTER_TYPE,
        name_field: DEFAULT_NAME_FIELD,
        values_field: DEFAULT_VALUES_FIELD,
    }
}

/// Literal metadata table, keyed by service name
static SERVICE_FILTER_METADATA: Lazy<BTreeMap<&'static str, ServiceFilterMeta>> =
    Lazy::new(|| {
        BTreeMap::from([
            ("autoscaling", default_meta("autoscaling")),
            // SDK module is aliased from the long service name
            ("databasemigrationservice", default_meta("dms")),
            ("docdb", default_meta("docdb")),
            ("ec2", default_meta("ec2")),
            ("elasticinference", default_meta("elasticinference")),
            ("elasticsearchservice", default_meta("elasticsearchservice")),
            ("fsx", default_meta("fsx")),
            ("imagebuilder", default_meta("imagebuilder")),
            ("licensemanager", default_meta("licensemanager")),
            ("neptune", default_meta("neptune")),
            ("rds", default_meta("rds")),
            (
                "resourcegroupstaggingapi",
                ServiceFilterMeta {
                    package: "resourcegroupstaggingapi",
                    filter_type: "TagFilter",
                    name_field: "key",
                    values_field: DEFAULT_VALUES_FIELD,
                },
            ),
            ("route53resolver", default_meta("route53resolver")),
        ])
    });

/// Look up the metadata for a service name
pub fn lookup(service: &str) -> Result<&'static ServiceFilterMeta> {
    SERVICE_FILTER_METADATA
        .get(service)
        .ok_or_else(|| Error::unknown_service(service))
}

/// SDK module alias for a service's filter type
pub fn filter_package(service: &str) -> Result<&'static str> {
    lookup(service).map(|meta| meta.package)
}

/// Filter record type name for a service
pub fn filter_type(service: &str) -> Result<&'static str> {
    lookup(service).map(|meta| meta.filter_type)
}

/// Name-field identifier of a service's filter record
pub fn filter_type_name_field(service: &str) -> Result<&'static str> {
    lookup(service).map(|meta| meta.name_field)
}

/// Values-field identifier of a service's filter record
pub fn filter_type_values_field(service: &str) -> Result<&'static str> {
    lookup(service).map(|meta| meta.values_field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_every_slice_service_has_metadata() {
        for service in SLICE_SERVICE_NAMES {
            assert!(lookup(service).is_ok(), "missing metadata for {service}");
        }
    }

    #[test]
    fn test_slice_service_names_are_sorted_and_unique() {
        let mut sorted = SLICE_SERVICE_NAMES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, SLICE_SERVICE_NAMES.to_vec());
    }

    #[test_case("ec2", "ec2"; "default alias")]
    #[test_case("databasemigrationservice", "dms"; "aliased package")]
    fn test_filter_package(service: &str, expected: &str) {
        assert_eq!(filter_package(service).unwrap(), expected);
    }

    #[test_case("rds", "Filter"; "default type")]
    #[test_case("resourcegroupstaggingapi", "TagFilter"; "tagging api type")]
    fn test_filter_type(service: &str, expected: &str) {
        assert_eq!(filter_type(service).unwrap(), expected);
    }

    #[test_case("ec2", "name"; "default name field")]
    #[test_case("resourcegroupstaggingapi", "key"; "tagging api key field")]
    fn test_filter_type_name_field(service: &str, expected: &str) {
        assert_eq!(filter_type_name_field(service).unwrap(), expected);
    }

    #[test]
    fn test_filter_type_values_field() {
        for service in SLICE_SERVICE_NAMES {
            assert_eq!(filter_type_values_field(service).unwrap(), "values");
        }
    }

    #[test]
    fn test_unknown_service() {
        let err = lookup("nosuchservice").unwrap_err();
        assert!(matches!(err, Error::UnknownService { .. }));
    }
}
