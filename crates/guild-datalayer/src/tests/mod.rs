mod directory;
mod in_flight;
