mod common;
mod enrichment;
mod routing;
