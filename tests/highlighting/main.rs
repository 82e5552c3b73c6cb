mod properties;
mod languages;
