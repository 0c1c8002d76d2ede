pub mod instructor;
