// Code generated by generate-service-filters; DO NOT EDIT.

use crate::filters::sdk::{autoscaling, dms, docdb, ec2, elasticinference, elasticsearchservice, fsx, imagebuilder, licensemanager, neptune, rds, resourcegroupstaggingapi, route53resolver};
use crate::filters::NameValuesFilters;

impl NameValuesFilters {
    /// Builds `autoscaling` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn autoscaling_filters(&self) -> Option<Vec<autoscaling::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(autoscaling::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `databasemigrationservice` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn databasemigrationservice_filters(&self) -> Option<Vec<dms::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(dms::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `docdb` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn docdb_filters(&self) -> Option<Vec<docdb::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(docdb::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `ec2` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn ec2_filters(&self) -> Option<Vec<ec2::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(ec2::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `elasticinference` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn elasticinference_filters(&self) -> Option<Vec<elasticinference::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(elasticinference::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `elasticsearchservice` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn elasticsearchservice_filters(&self) -> Option<Vec<elasticsearchservice::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(elasticsearchservice::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `fsx` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn fsx_filters(&self) -> Option<Vec<fsx::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(fsx::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `imagebuilder` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn imagebuilder_filters(&self) -> Option<Vec<imagebuilder::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(imagebuilder::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `licensemanager` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn licensemanager_filters(&self) -> Option<Vec<licensemanager::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(licensemanager::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `neptune` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn neptune_filters(&self) -> Option<Vec<neptune::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(neptune::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `rds` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn rds_filters(&self) -> Option<Vec<rds::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(rds::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `resourcegroupstaggingapi` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn resourcegroupstaggingapi_filters(&self) -> Option<Vec<resourcegroupstaggingapi::TagFilter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(resourcegroupstaggingapi::TagFilter {
                key: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }

    /// Builds `route53resolver` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn route53resolver_filters(&self) -> Option<Vec<route53resolver::Filter>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push(route53resolver::Filter {
                name: filter_name,
                values: filter_values,
            });
        }
        Some(result)
    }
}
