pub mod space_point;
pub mod body;
pub mod system;
pub mod forces;
pub mod integrator;
pub mod scenario;
