use dendrosim::{simulation, types::Compartment};

#[path = "../scenario_params.rs"]
mod scenario_params;

fn main() {
    env_logger::init();

    let params = scenario_params::get_scenario_params();
    let e_l = params.neuron_params.e_l;

    let mut simulation = simulation::create_simulation(params).unwrap();
    while simulation.tick().is_some() {}

    let recording = simulation.get_recording();

    println!("run result:");
    println!("...samples: {}", recording.len());
    println!(
        "...somatic spikes: {}",
        recording.soma_spike_times().len()
    );

    for compartment in [Compartment::Soma, Compartment::Dend1, Compartment::Dend2] {
        let peak = recording.peak_deflection(compartment, e_l).unwrap_or(0.0);
        println!("...peak {:?} deflection: {:.4} mV", compartment, peak * 1e3);
    }

    println!(
        "final state: {}",
        serde_json::to_string(&simulation.get_state_snapshot()).unwrap()
    );
}
