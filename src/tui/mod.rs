pub mod app;
mod scaler_states;
