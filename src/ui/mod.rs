/// Rendering collaborator: filter widgets, chart drawing, table display.
///
/// Everything here consumes the specs built by `chart` and the state
/// owned by `state`; no aggregation happens at this layer.
pub mod charts;
pub mod panels;
pub mod table;
