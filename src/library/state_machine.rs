use std::marker::PhantomData;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Drives a `transition` function from events queued by the UI or by effects.
///
/// Effects run on their own threads and report back through the event
/// channel. The owner calls [`StateMachine::pump`] once per frame to apply
/// whatever has arrived.
pub struct StateMachine<TState, TEvent, TEffect, T, E>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>),
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync,
{
    state: Option<TState>,
    transition_fn: T,
    run_effect_fn: Arc<E>,
    event_sender: Sender<TEvent>,
    event_receiver: Receiver<TEvent>,
    _effect: PhantomData<TEffect>,
}

impl<TState, TEvent, TEffect, T, E> StateMachine<TState, TEvent, TEffect, T, E>
where
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>),
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
{
    pub fn new(init: (TState, Vec<TEffect>), transition_fn: T, run_effect_fn: E) -> Self {
        let (event_sender, event_receiver) = channel();
        let (state, effects) = init;

        let machine = Self {
            state: Some(state),
            transition_fn,
            run_effect_fn: Arc::new(run_effect_fn),
            event_sender,
            event_receiver,
            _effect: PhantomData,
        };

        machine.spawn_effects(effects);

        machine
    }

    pub fn state(&self) -> &TState {
        match &self.state {
            Some(state) => state,
            None => unreachable!("state is only taken during a transition"),
        }
    }

    #[cfg(test)]
    pub fn sender(&self) -> Sender<TEvent> {
        self.event_sender.clone()
    }

    /// Applies an event immediately, without going through the channel.
    pub fn dispatch(&mut self, event: TEvent) {
        let Some(state) = self.state.take() else {
            return;
        };
        let (new_state, effects) = (self.transition_fn)(state, event);
        self.state = Some(new_state);
        self.spawn_effects(effects);
    }

    /// Applies every queued event. Returns the number of events handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    fn spawn_effects(&self, effects: Vec<TEffect>) {
        for effect in effects {
            let effect_sender = self.event_sender.clone();
            let run_effect_fn = Arc::clone(&self.run_effect_fn);
            std::thread::spawn(move || {
                run_effect_fn(effect, effect_sender);
            });
        }
    }
}
