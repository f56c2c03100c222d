pub mod fallsim_vis;
