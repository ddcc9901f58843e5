mod conversions;
mod fixture;
mod targets;
