use serde::{Deserialize, Serialize};

/// Configuration for the best-fit allocation pipeline
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct BFAConfig {
    /// Node budget for the truck load optimizer. If undefined, the search
    /// runs exhaustively; the search is exponential in the number of
    /// candidates, so large candidate lists warrant a budget.
    pub optimizer_node_budget: Option<u64>,
}

impl Default for BFAConfig {
    fn default() -> Self {
        Self {
            optimizer_node_budget: None,
        }
    }
}
