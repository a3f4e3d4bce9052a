use crate::neuron::Neuron;
use crate::params;
use crate::params::SimulationParams;
use crate::recorder::Recording;
use crate::spike_source::SpikeGenerator;
use crate::state_snapshot::{NeuronState, StateSnapshot};
use crate::synapse::ExtSynapse;
use crate::types::{Compartment, Dendrite};
use crate::util;
use log::{debug, info};
use simple_error::SimpleResult;
use simple_error::{try_with, SimpleError};

pub fn create_simulation(params: SimulationParams) -> Result<Simulation, SimpleError> {
    try_with!(
        params::validate_simulation_params(&params),
        "invalid simulation parameters"
    );

    let dt = params.dt;
    let num_steps = util::get_num_steps(params.sim_time, dt);
    let refractory_steps = util::duration_to_steps(params.neuron_params.tau_refractory, dt);

    let spike_times: Vec<Vec<f64>> = params
        .inputs
        .iter()
        .map(|input| input.spike_times.clone())
        .collect();
    let spike_generator = SpikeGenerator::new(&spike_times, dt);
    spike_generator.warn_about_late_spikes(num_steps);

    let synapses = params
        .inputs
        .iter()
        .enumerate()
        .map(|(source_id, input)| ExtSynapse::new(source_id, input.target, input.weight))
        .collect();

    info!(
        "creating simulation: {} steps of {:e} s, {} input(s)",
        num_steps,
        dt,
        params.inputs.len()
    );

    let mut simulation = Simulation {
        neuron: Neuron::new(&params.neuron_params),
        synapses,
        spike_generator,
        step: 0,
        num_steps,
        refractory_steps,
        recording: Recording::with_capacity(num_steps + 1),
        params,
    };

    simulation.deliver_input_spikes();
    simulation.recording.record(0.0, &simulation.neuron);

    Ok(simulation)
}

pub fn run_simulation(params: SimulationParams) -> SimpleResult<Recording> {
    Ok(create_simulation(params)?.run())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickResult {
    pub step: usize,
    pub t: f64,
    pub soma_spiked: bool,
}

pub struct Simulation {
    params: SimulationParams,
    neuron: Neuron,
    synapses: Vec<ExtSynapse>,
    spike_generator: SpikeGenerator,
    step: usize,
    num_steps: usize,
    refractory_steps: usize,
    recording: Recording,
}

impl Simulation {
    pub fn get_params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn get_step(&self) -> usize {
        self.step
    }

    pub fn get_num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn get_t(&self) -> f64 {
        util::step_to_time(self.step, self.params.dt)
    }

    pub fn get_recording(&self) -> &Recording {
        &self.recording
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.num_steps
    }

    /// Advances the clock by one step. Returns `None` once the simulation
    /// window is exhausted.
    pub fn tick(&mut self) -> Option<TickResult> {
        if self.is_finished() {
            return None;
        }

        self.neuron.integrate(
            self.step,
            self.params.dt,
            &self.params.neuron_params,
            &self.params.ext_synapse_params,
        );

        self.step += 1;
        let t = self.get_t();

        let soma_spiked = self.neuron.check_spike(
            self.step,
            self.refractory_steps,
            &self.params.neuron_params,
        );

        if soma_spiked {
            debug!("soma crossed threshold at t = {:.4} s", t);
            self.recording.record_soma_spike(t);
        }

        self.deliver_input_spikes();
        self.recording.record(t, &self.neuron);

        Some(TickResult {
            step: self.step,
            t,
            soma_spiked,
        })
    }

    pub fn run(mut self) -> Recording {
        while self.tick().is_some() {}

        info!(
            "simulation finished: {} samples, {} somatic spike(s)",
            self.recording.len(),
            self.recording.soma_spike_times().len()
        );

        self.recording
    }

    pub fn get_state_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            t: self.get_t(),
            neuron_state: NeuronState {
                v_soma: self.neuron.get_voltage(Compartment::Soma),
                v_dend1: self.neuron.get_voltage(Compartment::Dend1),
                v_dend2: self.neuron.get_voltage(Compartment::Dend2),
                s_ext1: self.neuron.get_gate(Dendrite::Dend1).s,
                s_ext2: self.neuron.get_gate(Dendrite::Dend2).s,
                refractory: self.neuron.is_refractory(self.step),
            },
        }
    }

    fn deliver_input_spikes(&mut self) {
        for synapse in &self.synapses {
            let num_spikes = self
                .spike_generator
                .num_spikes(synapse.source_id, self.step);

            if num_spikes > 0 {
                debug!(
                    "delivering {} spike(s) from input {} to {:?} at step {}",
                    num_spikes, synapse.source_id, synapse.target, self.step
                );
                let gate = self.neuron.get_gate_mut(synapse.target);
                synapse.process_pre_syn_spikes(num_spikes, gate);
            }
        }
    }
}
