use std::fmt;

/// Display-only metadata of a dataset: its name, the feature column names
/// and the name of the label column.
#[derive(Clone, PartialEq, Eq)]
pub struct DatasetHeader {
    relation_name: String,
    feature_names: Vec<String>,
    label_name: String,
}

impl DatasetHeader {
    pub fn new(
        relation_name: String,
        feature_names: Vec<String>,
        label_name: String,
    ) -> DatasetHeader {
        DatasetHeader {
            relation_name,
            feature_names,
            label_name,
        }
    }

    /// Header with generated names `feature_1..feature_n`.
    pub fn anonymous(number_of_features: usize) -> DatasetHeader {
        DatasetHeader {
            relation_name: "unnamed_relation".to_string(),
            feature_names: (1..=number_of_features)
                .map(|i| format!("feature_{i}"))
                .collect(),
            label_name: "label".to_string(),
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    pub fn number_of_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn feature_at_index(&self, index: usize) -> Option<&str> {
        self.feature_names.get(index).map(String::as_str)
    }
}

impl fmt::Debug for DatasetHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetHeader")
            .field("relation_name", &self.relation_name)
            .field("label_name", &self.label_name)
            .field("n_features", &self.feature_names.len())
            .finish()
    }
}
