pub mod sizing_calculator;
