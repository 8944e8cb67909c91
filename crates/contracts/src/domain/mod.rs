pub mod a001_model_response;
