mod gradient_check;
mod graph_basic;
