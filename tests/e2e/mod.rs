//! End-to-end flows across several endpoints
