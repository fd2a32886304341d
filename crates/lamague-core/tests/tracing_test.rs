use lamague_core::config::ObservabilityConfig;
use lamague_core::models::{AgentId, AgentMode, Tier};
use lamague_core::tracing::{events, init_tracing, init_tracing_with_config, init_tracing_with_filter};

#[test]
fn init_is_idempotent_and_events_emit() {
    init_tracing_with_filter("lamague=trace");
    init_tracing();
    init_tracing_with_config(&ObservabilityConfig {
        json: true,
        ..ObservabilityConfig::default()
    });

    let agent = AgentId::from("a-1");
    events::energy_spent("cascade_reorganization", 1.5, 3.0);
    events::energy_spike_detected(20, 250.0, 12.3);
    events::block_placed("orbits are ellipses", Tier::Foundation, 2.4);
    events::cascade_executed("orbits are ellipses", 1, 0.95, 0.5);
    events::cascade_rejected("heat is motion", 0.28, 0.34);
    events::agent_entered_grey(&agent, AgentMode::Healthy, 0.9);
    events::agent_recovered(&agent, 0.05);
    events::consensus_unavailable(3, 2);
    events::triad_converged(26, 5e-5);
    events::triad_budget_exhausted(1000, 0.02);
}
