mod app;
mod lookup;
mod snapshot;
