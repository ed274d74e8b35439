//! Service layer: README probing, throttling and fact retrieval.

pub mod fact_retriever;
pub mod fact_retriever_registry;
pub mod probe_throttle;
pub mod readme_fact_retriever;
pub mod readme_prober;
pub mod scoped_cache;
pub mod symlink;

pub use fact_retriever::{FactRetriever, FactRetrieverContext};
pub use fact_retriever_registry::{FactRetrieverRegistry, ScmInsightsModule};
pub use probe_throttle::ProbeThrottle;
pub use readme_fact_retriever::{ReadmeFactRetriever, README_FACT_RETRIEVER_ID};
pub use readme_prober::{ReadmeProber, ThrottledReadmeProber};
pub use scoped_cache::ScopedCache;
pub use symlink::is_symlink;
