use dendrosim::params::SimulationParams;

pub fn get_scenario_params() -> SimulationParams {
    let params_yaml_str = r#"
sim_time: 0.1
dt: 0.0001
neuron_params:
  e_l: -0.08
  v_thr: -0.045
  v_reset: -0.08
  c_m: 0.01
  g_l: 1.0
  g_c: 2.0
  tau_refractory: 0.002
ext_synapse_params:
  e_ext: 0.0
  g_ext: 1.0
  tau_ext: 0.005
inputs:
- spike_times: [0.05]
  target: Dend1
  weight: 1.0
- spike_times: [0.05]
  target: Dend2
  weight: 0.0
"#;

    serde_yaml::from_str(params_yaml_str).unwrap()
}
