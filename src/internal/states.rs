pub mod reactive_property;
