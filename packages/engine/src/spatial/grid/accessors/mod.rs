mod cell;
mod pointers;
