pub mod actuator;
pub mod fk;
pub mod ik;

pub use self::actuator::{convert_to_actuator_angles, ActuatorAngles};
pub use self::fk::ForwardKinematics;
pub use self::ik::{solve_joint_angles, Elbow, InverseKinematics, JointAngles};
