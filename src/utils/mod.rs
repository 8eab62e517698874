pub mod ip_list;
