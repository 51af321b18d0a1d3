pub mod star_quad_mesh;
