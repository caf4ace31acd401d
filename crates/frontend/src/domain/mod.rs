pub mod a001_form_record;
