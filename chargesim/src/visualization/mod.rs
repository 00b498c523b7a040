pub mod chargesim_vis2d;
